pub mod products_viewmodel;

pub use products_viewmodel::ProductsViewModel;
