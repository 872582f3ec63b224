// Bindings generated by build/rust_build.rs from resources/country_data.proto
include!(concat!(env!("OUT_DIR"), "/proto_gen/mod.rs"));
