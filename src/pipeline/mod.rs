pub mod stage1_load;
pub mod stage2_index;
pub mod stage3_sensitivity;
pub mod stage4_report;
