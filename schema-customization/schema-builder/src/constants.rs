pub mod fields {
    pub const ID: &str = "id";
    pub const SYS: &str = "sys";
    pub const METADATA: &str = "metadata";
    pub const CONTENTFUL_ID: &str = "contentful_id";
    pub const CONTENT_TYPE: &str = "contentType";
    pub const TAGS: &str = "tags";
    pub const GATSBY_IMAGE_DATA: &str = "gatsbyImageData";
    pub const LOCAL_FILE: &str = "localFile";
}

pub mod image_args {
    pub const JPEG_PROGRESSIVE: &str = "jpegProgressive";
    pub const RESIZING_BEHAVIOR: &str = "resizingBehavior";
    pub const CROP_FOCUS: &str = "cropFocus";
    pub const CORNER_RADIUS: &str = "cornerRadius";
    pub const QUALITY: &str = "quality";

    pub const DEFAULT_JPEG_PROGRESSIVE: bool = true;
    pub const DEFAULT_CORNER_RADIUS: i64 = 0;
    pub const DEFAULT_QUALITY: i64 = 50;
}

/// Node key the remote file subsystem stores the local copy's id under.
pub const LOCAL_FILE_LINK: &str = "fields.localFile";
