//! RSS 2.0 feed generation from the Post collection.
//!
//! A downstream consumer of the pipeline, not part of it: reads only the
//! public `title`/`description`/`slug`/`date` fields of Post records, sorts
//! by date descending, and emits `rss.xml`. The XML is assembled by string
//! formatting with explicit escaping — the document is small and fixed, a
//! templating layer would be overhead.

use crate::config::SiteConfig;
use crate::types::Post;
use chrono::{DateTime, NaiveTime, Utc};

/// Render the RSS 2.0 document for a set of posts.
///
/// Posts are sorted newest-first regardless of collection order. External
/// posts still syndicate; their links go through the site like everything
/// else.
pub fn rss_xml(config: &SiteConfig, posts: &[Post]) -> String {
    let base = config.base_url_trimmed();

    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut items = String::new();
    for post in sorted {
        let link = format!("{base}{}", post.slug);
        items.push_str(&format!(
            "    <item>\n      <title>{}</title>\n      <link>{}</link>\n      <guid>{}</guid>\n      <pubDate>{}</pubDate>\n      <description>{}</description>\n    </item>\n",
            xml_escape(&post.title),
            link,
            link,
            pub_date(post),
            xml_escape(&post.description),
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\">\n  <channel>\n    <title>{}</title>\n    <link>{}</link>\n    <description>{}</description>\n{}  </channel>\n</rss>\n",
        xml_escape(&config.title),
        base,
        xml_escape(&config.description),
        items
    )
}

/// RFC 2822 publication date. Front-matter dates have no time component;
/// midnight UTC is the convention.
fn pub_date(post: &Post) -> String {
    let midnight = post.date.and_time(NaiveTime::MIN);
    DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).to_rfc2822()
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::build;
    use crate::test_helpers::*;

    fn fixture_feed() -> String {
        let tmp = setup_fixtures();
        let collections = build(tmp.path()).unwrap();
        rss_xml(&collections.config, &collections.posts)
    }

    #[test]
    fn channel_carries_site_config() {
        let xml = fixture_feed();
        assert!(xml.contains("<rss version=\"2.0\">"));
        assert!(xml.contains("<title>My Site</title>"));
        assert!(xml.contains("<link>https://example.com</link>"));
    }

    #[test]
    fn items_sorted_newest_first() {
        let xml = fixture_feed();
        let newer = xml.find("/posts/hello-world").unwrap();
        let older = xml.find("/posts/older-post").unwrap();
        assert!(newer < older, "2024 post must precede 2023 post");
    }

    #[test]
    fn item_links_join_base_url_and_slug() {
        let xml = fixture_feed();
        assert!(xml.contains("<link>https://example.com/posts/hello-world</link>"));
        assert!(xml.contains("<guid>https://example.com/posts/hello-world</guid>"));
    }

    #[test]
    fn pub_date_is_rfc_2822() {
        let xml = fixture_feed();
        assert!(xml.contains("<pubDate>Fri, 1 Mar 2024 00:00:00 +0000</pubDate>"));
    }

    #[test]
    fn titles_are_xml_escaped() {
        assert_eq!(
            xml_escape("Props & <State>"),
            "Props &amp; &lt;State&gt;"
        );
    }

    #[test]
    fn empty_post_collection_is_a_valid_feed() {
        let config = SiteConfig::default();
        let xml = rss_xml(&config, &[]);
        assert!(xml.contains("<channel>"));
        assert!(!xml.contains("<item>"));
    }
}
