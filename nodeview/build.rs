fn main() {
    match shadow_rs::ShadowBuilder::builder().build() {
        Ok(_) => {}
        Err(err) => panic!("Failed to generate build information: {err}"),
    }
}
