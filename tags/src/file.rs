tag! {
    /// A source file read by the build, relative to the input directory.
    InFile { filename, into_filename }
}

tag! {
    /// An intermediate file that only lives in the scratch directory.
    TmpFile { filename, into_filename }
}

tag! {
    /// A file written to the output directory.
    OutFile { filename, into_filename }
}

tag! {
    /// A file that ends up inside the packaged data archive.
    PkgFile { filename, into_filename }
}
