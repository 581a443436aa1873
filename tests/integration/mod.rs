//! Integration tests for zkwalker

mod preorder_property;
mod test_utils;
mod walk_scenarios;
