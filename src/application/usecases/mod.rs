pub mod busy_times;
pub mod range_status;
pub mod subscription_state;
