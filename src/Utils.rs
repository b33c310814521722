//! different utility modules used throughout the project
/// logging initialisation: terminal logger and an optional log file
pub mod logger;
/// save the sample table into a csv or tab separated file
pub mod table_export;
/// parse document with structure like "title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
