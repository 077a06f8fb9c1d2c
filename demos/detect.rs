use chess_eye::{Backend, ChessEye, OnnxClassifier, Orientation};
use std::path::Path;

const MODEL_PATH: &str = "chess_model.onnx";
const IMAGE_PATH: &str = "board.jpg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Check the model
    if !Path::new(MODEL_PATH).exists() {
        println!("Model not found at '{}'.", MODEL_PATH);
        println!("Export the square classifier to ONNX and place it there.");
        return Ok(());
    }

    // 2. Initialize the pipeline
    println!("Loading square classifier...");
    let classifier = OnnxClassifier::from_file(MODEL_PATH, Backend::Tract)?;
    let mut eye = ChessEye::new(classifier);

    // 3. Run detection from both perspectives
    let bytes = std::fs::read(IMAGE_PATH)?;
    for orientation in [Orientation::White, Orientation::Black] {
        let detection = eye.detect_bytes(&bytes, orientation)?;
        println!("------------------------------------------------");
        println!("Photographed from {}: {}", orientation, detection.fen);
    }

    // 4. Show what the classifier was unsure about
    let detection = eye.detect_bytes(&bytes, Orientation::White)?;
    let unsure = detection
        .squares
        .iter()
        .enumerate()
        .filter(|(_, s)| s.confidence < eye.config().confidence_threshold);
    println!("------------------------------------------------");
    println!("Squares below the confidence floor:");
    for (i, square) in unsure {
        println!(
            "{}  (Prob: {:.2}%)",
            chess_eye::square_at(i),
            square.confidence * 100.0
        );
    }

    Ok(())
}
