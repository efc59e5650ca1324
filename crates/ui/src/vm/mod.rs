mod show_vm;

pub use show_vm::{ShowIntent, ShowVm};
