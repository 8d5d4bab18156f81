// Trainer inventory command and its page renderer

use crate::bot::AppState;
use crate::models::Pinventory;
use crate::utils::title_case;
use crate::BotError;
use serenity::all::{Context, Message};

pub const PAGE_SIZE: usize = 20;

/// Formats one page of a trainer's inventory. The page body is the slice of
/// up to 20 entries at offset `(page - 1) * 20`; the header totals always
/// cover the whole inventory, and max pages is the total owned count divided
/// into pages of 20, rounded up. A page past the end renders an empty body
/// under the same header; that is defined behavior, not an error.
pub fn render(display_name: &str, pinventory: &Pinventory, page: usize) -> String {
    let total = pinventory.total();
    let max_pages = (total as usize).div_ceil(PAGE_SIZE);

    let mut msg = format!(
        "__**{}'s Pokemon**__: Includes **{}** Pokemon. [Page **{}/{}**]\n",
        display_name, total, page, max_pages
    );
    let offset = page.saturating_sub(1) * PAGE_SIZE;
    for (name, count) in pinventory.iter().skip(offset).take(PAGE_SIZE) {
        msg.push_str(&format!("{} x{}\n", title_case(name), count));
    }
    msg
}

pub async fn display(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    page: usize,
) -> Result<(), BotError> {
    let user_id = msg.author.id.to_string();
    let text = {
        let store = state.trainers.lock();
        match store.record(&user_id) {
            Some(record) => render(&msg.author.name, &record.pinventory, page),
            // Unseen trainers get the empty-inventory header.
            None => render(&msg.author.name, &Pinventory::new(), page),
        }
    };
    msg.channel_id.say(&ctx.http, text).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(entries: &[(&str, u64)]) -> Pinventory {
        let mut inv = Pinventory::new();
        for (name, count) in entries {
            for _ in 0..*count {
                inv.add(name);
            }
        }
        inv
    }

    #[test]
    fn test_first_page_lists_entries_with_whole_inventory_totals() {
        let inv = inventory(&[("a", 25), ("b", 5)]);
        let page = render("Ash", &inv, 1);
        assert_eq!(
            page,
            "__**Ash's Pokemon**__: Includes **30** Pokemon. [Page **1/2**]\nA x25\nB x5\n"
        );
    }

    #[test]
    fn test_page_past_entries_keeps_header_totals() {
        let inv = inventory(&[("a", 25), ("b", 5)]);
        let page = render("Ash", &inv, 2);
        assert_eq!(
            page,
            "__**Ash's Pokemon**__: Includes **30** Pokemon. [Page **2/2**]\n"
        );
    }

    #[test]
    fn test_entries_are_sliced_by_twenty() {
        let entries: Vec<(String, u64)> = (0..25).map(|i| (format!("pkmn{:02}", i), 1)).collect();
        let mut inv = Pinventory::new();
        for (name, _) in &entries {
            inv.add(name);
        }

        let first = render("Ash", &inv, 1);
        assert!(first.contains("Pkmn00 x1"));
        assert!(first.contains("Pkmn19 x1"));
        assert!(!first.contains("Pkmn20 x1"));

        let second = render("Ash", &inv, 2);
        assert!(second.contains("Pkmn20 x1"));
        assert!(second.contains("Pkmn24 x1"));
        assert!(!second.contains("Pkmn19 x1"));
    }

    #[test]
    fn test_empty_inventory() {
        let page = render("Ash", &Pinventory::new(), 1);
        assert_eq!(
            page,
            "__**Ash's Pokemon**__: Includes **0** Pokemon. [Page **1/0**]\n"
        );
    }

    #[test]
    fn test_names_are_title_cased_keeping_underscores() {
        let inv = inventory(&[("tapu_koko", 2)]);
        let page = render("Ash", &inv, 1);
        assert!(page.contains("Tapu_Koko x2"));
    }
}
