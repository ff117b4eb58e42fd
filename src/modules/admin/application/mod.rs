pub mod admin_form;
pub mod save_workflow;
pub mod upload_failure_policy;
