mod view;

pub use view::HomePage;
