tag! {
    /// A named target that other build steps can depend on.
    DepTarget { name, into_name }
}
