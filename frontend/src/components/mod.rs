// Reusable components live here.

pub mod article_actions;
pub mod article_card;
pub mod comments;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod page_loader;
pub mod raw_html;
pub mod related_articles;
pub mod share_bar;
pub mod table_of_contents;
pub mod toast;
