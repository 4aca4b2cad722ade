#![allow(dead_code)]

use actuator_links::config::Config;
use actuator_links::server::build_state;
use actuator_links::state::AppState;

pub fn test_config() -> Config {
    Config::default()
}

pub fn create_test_state() -> AppState {
    build_state(&test_config()).unwrap()
}

pub fn create_test_state_with(configure: impl FnOnce(&mut Config)) -> AppState {
    let mut config = test_config();
    configure(&mut config);
    build_state(&config).unwrap()
}
