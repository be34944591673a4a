//! Bulk item import parsing.
//!
//! One item per line, comma separated:
//! `name,description,category,effect,rarity,base_price,image_url`

use crate::models::Item;

/// Parse a single import line into an item. Returns `None` for blank lines
/// and lines without a name.
pub fn parse_item_line(line: &str) -> Option<Item> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut fields = line.split(',').map(str::trim);
    let name = fields.next().unwrap_or_default().to_string();
    if name.is_empty() {
        return None;
    }

    let description = fields.next().unwrap_or_default().to_string();
    let category = fields.next().unwrap_or_default().to_string();
    let effect = fields.next().unwrap_or_default().to_string();
    let rarity = fields.next().unwrap_or_default().to_string();
    let base_price = fields.next().unwrap_or_default().parse().unwrap_or(0);
    let image_url = fields.next().unwrap_or_default().to_string();

    Some(Item {
        id: 0,
        name,
        description,
        category,
        effect,
        rarity,
        base_price,
        image_url,
    })
}

/// Parse a whole import paste, skipping blank lines.
pub fn parse_item_lines(text: &str) -> Vec<Item> {
    text.lines().filter_map(parse_item_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let item =
            parse_item_line("Potion,A basic potion,medicine,heal,common,10,http://x").unwrap();
        assert_eq!(item.name, "Potion");
        assert_eq!(item.description, "A basic potion");
        assert_eq!(item.category, "medicine");
        assert_eq!(item.effect, "heal");
        assert_eq!(item.rarity, "common");
        assert_eq!(item.base_price, 10);
        assert_eq!(item.image_url, "http://x");
    }

    #[test]
    fn test_unparsable_price_becomes_zero() {
        let item = parse_item_line("Orb,Round,misc,none,rare,not-a-number,http://x").unwrap();
        assert_eq!(item.base_price, 0);
    }

    #[test]
    fn test_short_line_fills_defaults() {
        let item = parse_item_line("Pebble").unwrap();
        assert_eq!(item.name, "Pebble");
        assert_eq!(item.description, "");
        assert_eq!(item.base_price, 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let items = parse_item_lines("Potion,heals,medicine,heal,common,10,\n\n   \nEther,,medicine,restore,rare,25,\n");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Potion");
        assert_eq!(items[1].base_price, 25);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let item = parse_item_line("  Potion , A basic potion , medicine,heal,common, 10 ,url").unwrap();
        assert_eq!(item.name, "Potion");
        assert_eq!(item.description, "A basic potion");
        assert_eq!(item.base_price, 10);
    }
}
