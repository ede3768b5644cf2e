pub mod sweep_groups_use_case;
