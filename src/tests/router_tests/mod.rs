mod catalog_tests;
mod inquiry_tests;
mod listing_tests;
