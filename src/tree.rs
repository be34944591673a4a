//! Evolution line utilities.
//!
//! Rebuilds the branching evolution forest from the flat list the backend
//! stores per species.

use crate::models::EvolutionEntry;
use std::collections::HashSet;

/// One species stage with its evolutions nested beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionNode {
    pub entry: EvolutionEntry,
    pub children: Vec<EvolutionNode>,
}

/// Build the evolution forest from a flat line.
///
/// Entries with no `evolves_from` become roots; when legacy data marks none,
/// the first entry is treated as the root. Each remaining entry attaches to
/// the entry whose `number` matches its `evolves_from`. Self references,
/// repeated numbers, and cyclic data are skipped rather than recursed into,
/// so malformed lines terminate; entries whose parent never appears are
/// dropped.
pub fn build_evolution_forest(line: &[EvolutionEntry]) -> Vec<EvolutionNode> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut roots: Vec<&EvolutionEntry> = line
        .iter()
        .filter(|e| e.evolves_from.as_deref().map_or(true, str::is_empty))
        .collect();
    if roots.is_empty() {
        roots.push(&line[0]);
    }

    let mut seen = HashSet::new();
    let mut forest = Vec::new();
    for root in roots {
        if seen.insert(root.number.clone()) {
            forest.push(build_node(root, line, &mut seen));
        }
    }
    forest
}

fn build_node(
    entry: &EvolutionEntry,
    line: &[EvolutionEntry],
    seen: &mut HashSet<String>,
) -> EvolutionNode {
    let mut children = Vec::new();
    for candidate in line {
        if candidate.number == entry.number {
            continue;
        }
        if candidate.evolves_from.as_deref() != Some(entry.number.as_str()) {
            continue;
        }
        if !seen.insert(candidate.number.clone()) {
            continue;
        }
        children.push(build_node(candidate, line, seen));
    }
    EvolutionNode {
        entry: entry.clone(),
        children,
    }
}

/// Flatten a forest into (entry, depth) pairs in display order.
pub fn flatten_forest(nodes: &[EvolutionNode]) -> Vec<(EvolutionEntry, usize)> {
    fn collect(nodes: &[EvolutionNode], depth: usize, out: &mut Vec<(EvolutionEntry, usize)>) {
        for node in nodes {
            out.push((node.entry.clone(), depth));
            collect(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    collect(nodes, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(number: &str, evolves_from: Option<&str>) -> EvolutionEntry {
        EvolutionEntry {
            number: number.to_string(),
            name: format!("Mon {number}"),
            level: String::new(),
            evolves_from: evolves_from.map(str::to_string),
        }
    }

    #[test]
    fn test_linear_line() {
        let line = vec![
            entry("001", None),
            entry("002", Some("001")),
            entry("003", Some("002")),
        ];
        let forest = build_evolution_forest(&line);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].entry.number, "001");
        assert_eq!(forest[0].children[0].entry.number, "002");
        assert_eq!(forest[0].children[0].children[0].entry.number, "003");
    }

    #[test]
    fn test_branching_line() {
        // Eevee-style split evolution.
        let line = vec![
            entry("133", None),
            entry("134", Some("133")),
            entry("135", Some("133")),
            entry("136", Some("133")),
        ];
        let forest = build_evolution_forest(&line);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 3);
    }

    #[test]
    fn test_empty_evolves_from_is_root() {
        let line = vec![entry("010", Some("")), entry("011", Some("010"))];
        let forest = build_evolution_forest(&line);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].entry.number, "010");
        assert_eq!(forest[0].children.len(), 1);
    }

    #[test]
    fn test_legacy_line_without_roots() {
        // Old rows never set evolves_from on the first stage either.
        let line = vec![entry("020", Some("019")), entry("021", Some("020"))];
        let forest = build_evolution_forest(&line);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].entry.number, "020");
        assert_eq!(forest[0].children[0].entry.number, "021");
    }

    #[test]
    fn test_every_child_appears_once() {
        let line = vec![
            entry("001", None),
            entry("002", Some("001")),
            entry("003", Some("002")),
            entry("004", Some("001")),
        ];
        let flat = flatten_forest(&build_evolution_forest(&line));
        let mut numbers: Vec<String> = flat.iter().map(|(e, _)| e.number.clone()).collect();
        numbers.sort();
        assert_eq!(numbers, vec!["001", "002", "003", "004"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let line = vec![entry("001", Some("002")), entry("002", Some("001"))];
        let forest = build_evolution_forest(&line);
        // No explicit root; first entry wins, the edge back is skipped.
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].entry.number, "001");
        assert_eq!(forest[0].children.len(), 1);
        assert!(forest[0].children[0].children.is_empty());
    }

    #[test]
    fn test_self_reference_skipped() {
        let line = vec![entry("001", None), entry("001", Some("001"))];
        let forest = build_evolution_forest(&line);
        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_missing_parent_dropped() {
        let line = vec![entry("001", None), entry("005", Some("999"))];
        let flat = flatten_forest(&build_evolution_forest(&line));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].0.number, "001");
    }

    #[test]
    fn test_flatten_depths() {
        let line = vec![
            entry("001", None),
            entry("002", Some("001")),
            entry("003", Some("002")),
        ];
        let flat = flatten_forest(&build_evolution_forest(&line));
        let depths: Vec<usize> = flat.iter().map(|(_, d)| *d).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }
}
