use tf_config::TaskflowConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TaskflowConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TaskflowConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.session.is_configured() && has_env_prefix(&env_keys, "TASKFLOW_SESSION") {
        warnings.push(
            "Session identity appears unset while TASKFLOW_SESSION* env vars exist. Use double underscores (example: TASKFLOW_SESSION__USER_ID)."
                .to_string(),
        );
    }

    let stray_timer = env_keys
        .iter()
        .any(|key| key.starts_with("TASKFLOW_TIMER") && !key.starts_with("TASKFLOW_TIMER__"));
    if stray_timer {
        warnings.push(
            "TASKFLOW_TIMER* env var is not nested and was ignored. Use double underscores (example: TASKFLOW_TIMER__TICK_INTERVAL_SECS)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use tf_config::{SessionConfig, TaskflowConfig};
    use tf_core::enums::UserRole;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_mistyped_env_keys() {
        let config = TaskflowConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("TASKFLOW_SESSION_USER_ID", "usr-1"),
                ("TASKFLOW_TIMER_TICK_INTERVAL_SECS", "5"),
            ]),
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn quiet_when_configured() {
        let config = TaskflowConfig {
            session: SessionConfig {
                user_id: "usr-1".to_string(),
                user_name: String::new(),
                role: UserRole::Admin,
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("TASKFLOW_SESSION__USER_ID", "usr-1"),
                ("TASKFLOW_TIMER__TICK_INTERVAL_SECS", "5"),
            ]),
        );
        assert!(warnings.is_empty());
    }
}
