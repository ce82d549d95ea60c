mod harvester_tests;
mod locator_tests;
