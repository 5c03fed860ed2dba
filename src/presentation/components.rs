mod footer;

pub use footer::render_footer;
