//! Menu choices.

use std::str::FromStr;

pub const MAIN_MENU: &str = "\nOptions:\n\
    1. Add new item\n\
    2. Edit item\n\
    3. Remove item\n\
    4. View item\n\
    5. View inventory as table\n\
    x. Exit\n";

pub const REPORT_MENU: &str = "Tabular Inventory Menu:\n\
    1. Create/Reset Table\n\
    2. Sort Table\n";

/// Top-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    EditItem,
    RemoveItem,
    ViewItem,
    ViewInventory,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(MenuChoice::AddItem),
            "2" => Ok(MenuChoice::EditItem),
            "3" => Ok(MenuChoice::RemoveItem),
            "4" => Ok(MenuChoice::ViewItem),
            "5" => Ok(MenuChoice::ViewInventory),
            "x" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Choices in the report sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChoice {
    Create,
    Sort,
    Back,
}

impl FromStr for ReportChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(ReportChoice::Create),
            "2" => Ok(ReportChoice::Sort),
            "x" => Ok(ReportChoice::Back),
            _ => Err(()),
        }
    }
}
