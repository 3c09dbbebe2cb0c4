// Topics: named keyword sets loaded from plain text files.

pub mod keywords;

pub use keywords::Topic;
