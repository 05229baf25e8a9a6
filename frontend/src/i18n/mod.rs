pub mod fa_ir;

pub use fa_ir as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

/// [`fill_one`] for counts, written with Persian digits.
pub fn fill_count(template: &str, count: impl std::fmt::Display) -> String {
    fill_one(template, abzarestan_shared::persian_date::to_persian_digits(&count.to_string()))
}
