mod fields;

pub use fields::fill_missing;
