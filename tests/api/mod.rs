mod file_access_tests;
mod health_tests;
