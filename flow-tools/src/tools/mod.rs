// Small pipeline nodes that sit around the search flow

pub mod content_safety;
pub mod ids;
pub mod reason_context;
pub mod sources;

pub use content_safety::format_output;
pub use ids::generate_unique_id;
pub use reason_context::filter_and_transform_data;
pub use sources::process_search_results_sources;
