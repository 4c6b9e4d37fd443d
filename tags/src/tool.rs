tag! {
    /// A tool compiled as part of ICU itself, such as `genrb` or `pkgdata`.
    IcuTool { name, into_name }
}

tag! {
    /// A tool expected on the host, such as `cp`.
    SystemTool { name, into_name }
}
