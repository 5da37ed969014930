pub mod holdings_source;
pub mod mock_feed;
