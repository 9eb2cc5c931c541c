//! Test fixtures
//!
//! Canned feed documents and factory functions for creating test data.

use chrono::Utc;

use crate::domain::entities::VideoItem;

/// A well-formed RSS 2.0 document exercising every extraction rule: CDATA
/// titles, the enclosure-over-embedded-image precedence, protocol-relative
/// media URLs, guid link fallback, and an item with nothing but a title.
pub const RSS_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:media="http://search.yahoo.com/mrss/"
     xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Example Dispatch</title>
    <link>https://blog.example.com</link>
    <item>
      <title><![CDATA[Hello]]></title>
      <link>http://x/a</link>
    </item>
    <item>
      <title>Second post</title>
      <link>https://blog.example.com/second</link>
      <enclosure url="https://cdn.example.com/cover2.jpg" type="image/jpeg" length="1024"/>
      <description><![CDATA[<p>Intro</p><img src="https://cdn.example.com/embedded2.png">]]></description>
    </item>
    <item>
      <title>Third post</title>
      <guid isPermaLink="true">https://blog.example.com/guid-3</guid>
      <media:content url="//cdn.example.com/cover3.png" medium="image"/>
    </item>
    <item>
      <title>Fourth post</title>
    </item>
  </channel>
</rss>
"#;

/// A well-formed Atom document with no RSS items at all.
pub const ATOM_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Notes</title>
  <entry>
    <title>Atom first</title>
    <link rel="alternate" href="https://blog.example.com/atom-1"/>
    <content type="html"><![CDATA[<p>Hi</p><img src="https://cdn.example.com/atom1.jpg" alt="">]]></content>
  </entry>
  <entry>
    <title>Atom second</title>
    <summary>No image here.</summary>
  </entry>
</feed>
"#;

/// Not XML, and not block-matchable either.
pub const MALFORMED_FEED: &str = "<<<not a feed>>> totally & utterly broken";

/// Create a test video with default values
pub fn test_video(id: &str) -> VideoItem {
    VideoItem {
        id: id.to_string(),
        title: format!("Episode {id}"),
        published_at: Utc::now(),
        thumbnail: Some(format!("https://img.example.com/{id}.jpg")),
    }
}
