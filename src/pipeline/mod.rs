pub mod stage1_load;
pub mod stage2_understanding;
pub mod stage3_scoring;
pub mod stage4_rank;
pub mod stage5_report;
