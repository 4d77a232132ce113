mod header_tests;
mod test_helpers;
