//! The site's known articles, used as the pool for related suggestions.
//!
//! The frontend tries to read each entry from its article document and falls
//! back to the literals below when the fetch or parse fails.

use crate::CatalogEntry;

fn literal(id: &str, title: &str, tags: &[&str], category: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
    }
}

/// Fallback entries, in catalog order.
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        literal(
            "1",
            "کنترل به جای نوآوری؛ روایت توسعه نامتوازن هوش مصنوعی در ایران",
            &["هوش مصنوعی", "سیاست", "اینترنت"],
            "تکنولوژی",
        ),
        literal(
            "2",
            "میراث جنگ ۱۲ روزه: غلبه نگاه امنیتی بر اکوسیستم دیجیتال",
            &["جنگ", "امنیت", "اینترنت", "فیلترینگ", "سیاست"],
            "امنیت",
        ),
        literal(
            "3",
            "از اینترنت تا پیامک؛ گسترش سانسور به آخرین کانال ارتباطی",
            &["سانسور", "پیامک", "فیلترینگ", "اینترنت"],
            "سانسور",
        ),
        literal(
            "4",
            "رمز‌ارز جدیدترین ابزار جمهوری اسلامی برای تاب‌آوری در مقابل تحریم‌ها؛ اعمال فشار و \
             محدودیت برای جلوگیری از دور زدن تحریم‌ها",
            &["رمز‌ارز", "سیاستگذاری", "اینترنت", "فیلترینگ"],
            "شبکه و سیاستگذاری",
        ),
    ]
}

/// Entries whose title, category or tags contain `query`, case-insensitive.
/// A blank query matches everything.
pub fn search<'a>(catalog: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry.category.to_lowercase().contains(&needle)
                || entry.tags.iter().any(|t| t.trim().to_lowercase() == needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_unique_ids() {
        let catalog = default_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_matches_tags_and_titles() {
        let catalog = default_catalog();
        let hits: Vec<_> = search(&catalog, "فیلترینگ").iter().map(|e| e.id.clone()).collect();
        assert_eq!(hits, vec!["2", "3", "4"]);
        assert_eq!(search(&catalog, "پیامک").len(), 1);
        assert_eq!(search(&catalog, "  ").len(), 4);
    }
}
