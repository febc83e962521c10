use std::fs;

use tracing::error;

/// Reads a secret either from the file named by `file_env_var_name` or,
/// when that variable is absent, directly from `env_var_name`.
///
/// `lookup` resolves variable names, normally to the process environment.
pub fn get_secret(
    lookup: impl Fn(&str) -> Option<String>,
    file_env_var_name: &str,
    env_var_name: &str,
) -> Option<String> {
    if let Some(secret_file_path) = lookup(file_env_var_name) {
        // Found a file path, try to read the file
        match fs::read_to_string(&secret_file_path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                None
            }
        }
    } else {
        lookup(env_var_name)
    }
}
