use crate::{
    BuilderContext,
    constants::{LOCAL_FILE_LINK, fields, image_args},
};
use schema::{
    ArgumentMap, EnumTypeDefinition, FILE_TYPE, InputValue, LinkExtension, NODE_INTERFACE, ObjectTypeDefinition,
    OutputField, REMOTE_FILE_INTERFACE, ScalarType, SharedType, TypeDefinition, TypeRef,
};

/// The image enums followed by `ContentfulAsset`.
pub(crate) fn asset_types(ctx: &BuilderContext) -> Vec<TypeDefinition> {
    vec![
        resizing_behavior_enum().into(),
        crop_focus_enum().into(),
        TypeDefinition::Object(asset_object(ctx)),
    ]
}

fn resizing_behavior_enum() -> EnumTypeDefinition {
    EnumTypeDefinition::new(SharedType::ImageResizingBehavior.name())
        .value("NO_CHANGE")
        .described_value(
            "PAD",
            "Same as the default resizing, but adds padding so that the generated image has the specified dimensions.",
        )
        .described_value("CROP", "Crop a part of the original image to match the specified size.")
        .described_value(
            "FILL",
            "Crop the image to the specified dimensions. Images smaller than these dimensions are upscaled.",
        )
        .described_value(
            "THUMB",
            "Create a thumbnail from the image, based on the focus area given by `cropFocus`.",
        )
        .described_value("SCALE", "Scale the image regardless of the original aspect ratio.")
}

fn crop_focus_enum() -> EnumTypeDefinition {
    [
        "TOP",
        "TOP_LEFT",
        "TOP_RIGHT",
        "BOTTOM",
        "BOTTOM_RIGHT",
        "BOTTOM_LEFT",
        "RIGHT",
        "LEFT",
        "FACE",
        "FACES",
        "CENTER",
    ]
    .into_iter()
    .fold(EnumTypeDefinition::new(SharedType::ImageCropFocus.name()), |focus, value| {
        focus.value(value)
    })
}

/// Arguments offered on `gatsbyImageData` on top of the image subsystem's own.
pub(crate) fn image_args() -> ArgumentMap {
    let mut args = ArgumentMap::new();

    args.insert(
        image_args::JPEG_PROGRESSIVE.to_owned(),
        InputValue::new(ScalarType::Boolean).with_default(image_args::DEFAULT_JPEG_PROGRESSIVE),
    );
    args.insert(
        image_args::RESIZING_BEHAVIOR.to_owned(),
        InputValue::new(SharedType::ImageResizingBehavior),
    );
    args.insert(
        image_args::CROP_FOCUS.to_owned(),
        InputValue::new(SharedType::ImageCropFocus),
    );
    args.insert(
        image_args::CORNER_RADIUS.to_owned(),
        InputValue::new(ScalarType::Int)
            .with_default(image_args::DEFAULT_CORNER_RADIUS)
            .with_description(
                "Desired corner radius in pixels. 0 keeps square corners, -1 gives a full circle or ellipse.",
            ),
    );
    args.insert(
        image_args::QUALITY.to_owned(),
        InputValue::new(ScalarType::Int).with_default(image_args::DEFAULT_QUALITY),
    );

    args
}

fn asset_object(ctx: &BuilderContext) -> ObjectTypeDefinition {
    let string = || OutputField::new(ScalarType::String);
    let int = || OutputField::new(ScalarType::Int);

    let image_data = ctx
        .remote_files
        .image_data_field(ctx.image_data_resolver.clone(), image_args());

    let mut object = ObjectTypeDefinition::new(SharedType::Asset.name())
        .field(fields::CONTENTFUL_ID, string().required())
        .field(fields::ID, OutputField::new(ScalarType::Id).required())
        .field(fields::SYS, OutputField::new(SharedType::Sys).required())
        .field("title", string())
        .field("description", string())
        .field(fields::CONTENT_TYPE, string())
        .field("fileName", string())
        .field("url", string())
        .field("size", int())
        .field("width", int())
        .field("height", int())
        .field(fields::METADATA, OutputField::new(SharedType::Metadata).required())
        .field(fields::GATSBY_IMAGE_DATA, image_data);

    if ctx.config.download_local {
        tracing::debug!("Linking assets to their local file copies");

        let local_file = OutputField::new(TypeRef::named(FILE_TYPE)).linked(LinkExtension::by_id(LOCAL_FILE_LINK));
        object = object.field(fields::LOCAL_FILE, local_file);
    }

    let object = object
        .implements(SharedType::Reference.name())
        .implements(NODE_INTERFACE)
        .implements(REMOTE_FILE_INTERFACE)
        .dont_infer();

    ctx.remote_files.add_remote_file_interface(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_args_carry_their_defaults() {
        let args = image_args();

        let rendered: Vec<String> = args
            .iter()
            .map(|(name, arg)| match &arg.default_value {
                Some(default) => format!("{name}: {} = {default}", arg.value_type),
                None => format!("{name}: {}", arg.value_type),
            })
            .collect();

        assert_eq!(
            rendered,
            [
                "jpegProgressive: Boolean = true",
                "resizingBehavior: ImageResizingBehavior",
                "cropFocus: ContentfulImageCropFocus",
                "cornerRadius: Int = 0",
                "quality: Int = 50",
            ]
        );
        assert_eq!(args["quality"].default_value, Some(json!(50)));
        assert!(args["cornerRadius"].description.is_some());
    }

    #[test]
    fn resizing_behaviors_document_everything_but_no_change() {
        let behaviors = resizing_behavior_enum();

        let undocumented: Vec<&str> = behaviors
            .values
            .iter()
            .filter(|(_, value)| value.description.is_none())
            .map(|(name, _)| name.as_str())
            .collect();

        assert_eq!(behaviors.values.len(), 6);
        assert_eq!(undocumented, ["NO_CHANGE"]);
    }

    #[test]
    fn crop_focus_keeps_declaration_order() {
        let focus = crop_focus_enum();
        let values: Vec<&str> = focus.values.keys().map(String::as_str).collect();

        assert_eq!(values.first(), Some(&"TOP"));
        assert_eq!(values.last(), Some(&"CENTER"));
        assert_eq!(values.len(), 11);
        assert!(focus.contains("FACES"));
    }
}
