mod tests_libraries;
