pub mod rmse;

pub use rmse::calc_root_mean_squared_error;
