mod api_tests;
mod pages_tests;
mod prediction_tests;
mod visualization_tests;
