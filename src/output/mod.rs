mod format;
mod json;
mod table;

pub(crate) use json::{
    output_archives_json, output_day_status_json, output_mark_json, output_monthly_json,
    output_rotation_json,
};
pub(crate) use table::{
    print_archives, print_day_status, print_mark_results, print_monthly_summary, print_rotation,
};
