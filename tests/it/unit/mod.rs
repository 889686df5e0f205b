mod coords_tests;
mod snapshot_tests;
mod tooltip_tests;
