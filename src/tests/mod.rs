// Test modules for the line-selection engine
//
// Pattern-set assembly tests use tempfile for real pattern files; matcher
// and scanner tests run against in-memory readers and writers so output
// can be asserted byte for byte.

pub mod pattern_tests; // Pattern-set assembly from direct args and pattern files
