mod flatten_tests;
mod pipeline_tests;
mod url_tests;
