mod app_data_dir;
mod recipe_slot_store;

pub use app_data_dir::app_data_dir;
pub use recipe_slot_store::JsonRecipeSlotStore;
