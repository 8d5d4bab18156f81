// Chat command handlers - one file per domain
pub mod inventory;
pub mod pokemon;
