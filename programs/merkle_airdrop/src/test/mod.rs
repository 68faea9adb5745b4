pub mod merkle_tree;

mod test_has_claimed;
