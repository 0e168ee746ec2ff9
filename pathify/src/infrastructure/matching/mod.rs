pub mod nucleo_matcher;

pub use nucleo_matcher::NucleoMatcher;
