#[cfg(test)]
mod common;

#[cfg(test)]
mod route_dispatch_tests;

#[cfg(test)]
mod nav_route_consistency_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod translation_tests;

#[cfg(test)]
mod preference_restart_tests;

#[cfg(test)]
mod form_error_tests;

#[cfg(test)]
mod config_tests;
