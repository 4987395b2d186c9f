use ppm_filter_rs::image_pipeline::{
    FilterPipeline, PipelineConfig, PipelineError, Rgb, RgbImage, Schedule, gaussian_blur, mirror,
    negate, ppm,
};
use tempfile::tempdir;

fn gradient_image(width: u32, height: u32) -> RgbImage {
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| Rgb::new((x * 7 % 256) as u16, (y * 5 % 256) as u16, ((x + y) % 256) as u16)))
        .collect();
    RgbImage::new(width, height, 255, pixels).unwrap()
}

#[test]
fn test_convert_file_applies_filters_in_order() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.ppm");
    let output_path = dir.path().join("output.ppm");

    let image = gradient_image(40, 25);
    std::fs::write(&input_path, ppm::encode(&image)).unwrap();

    let config = PipelineConfig::builder().blur(2, 1.2).mirror().negate().build();
    let pipeline = FilterPipeline::new(config).unwrap();
    let timings = pipeline.convert_file(&input_path, &output_path).unwrap();
    assert_eq!(timings.steps().len(), 5);

    let expected = gaussian_blur(&image, 2, 1.2, Schedule::Sequential).unwrap();
    let expected = mirror(expected, Schedule::Sequential);
    let expected = negate(&expected, Schedule::Sequential);

    let written = ppm::decode(&std::fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn test_missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("output.ppm");
    let pipeline = FilterPipeline::new(PipelineConfig::builder().negate().build()).unwrap();

    let result = pipeline.convert_file(dir.path().join("missing.ppm"), &output_path);

    assert!(matches!(result.unwrap_err(), PipelineError::InputReadError(_)));
    assert!(!output_path.exists());
}

#[test]
fn test_malformed_input_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.ppm");
    let output_path = dir.path().join("output.ppm");
    std::fs::write(&input_path, b"P6\n4 4\n255\n\x01\x02").unwrap();

    let pipeline = FilterPipeline::new(PipelineConfig::builder().mirror().build()).unwrap();
    let err = pipeline.convert_file(&input_path, &output_path).unwrap_err();

    assert!(err.is_format_error());
    assert!(!output_path.exists());
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.ppm");
    std::fs::write(&input_path, ppm::encode(&gradient_image(3, 3))).unwrap();

    let pipeline = FilterPipeline::new(PipelineConfig::builder().negate().build()).unwrap();
    let result = pipeline.convert_file(&input_path, dir.path().join("no_such_dir").join("out.ppm"));

    assert!(matches!(result.unwrap_err(), PipelineError::OutputWriteError(_)));
}
