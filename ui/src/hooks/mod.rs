pub mod use_spot_rate;
