use std::path::Path;

use retro_playlist_lib::edit::sort_by_name;

use crate::CliError;
use crate::cli_types::OutputArgs;
use crate::commands::{load_list, resolve_output, save_list};

pub(crate) fn run_sort(file: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let mut list = load_list(file)?;
    sort_by_name(&mut list.entries);
    log::info!("Sorted {} entries by name", list.entries.len());

    let (path, format) = resolve_output(output, list.path.clone(), list.format);
    save_list(&path, format, &list.entries, &list.meta)
}
