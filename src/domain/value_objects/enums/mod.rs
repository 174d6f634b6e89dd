pub mod crowd_levels;
pub mod status_colors;
pub mod subscription_statuses;
pub mod subscription_types;
