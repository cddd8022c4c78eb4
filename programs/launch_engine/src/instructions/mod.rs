pub mod buy;
pub mod create_launch;
pub mod initialize;
pub mod migrate;
pub mod sell;
pub mod set_sell_window;
pub mod transfer;
pub mod update_global;
