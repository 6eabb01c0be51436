use terrain_core::{GeneratorParams, build, generate};

fn main() {
    // 129×129 heightfield, seed 2025, heights 0..40, roughness 0.4
    let heights = generate(GeneratorParams::new(129, 2025, 0.0, 40.0, 0.4)).unwrap();

    // Print the top-left 16×16 corner
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>6.2} ", heights.get(x, y));
        }
        println!();
    }

    let mesh = build(heights, 0.25, 0.2);
    let (lo, hi) = mesh.bounds().unwrap();
    println!(
        "{} vertices, {} triangles, bounds {:?} .. {:?}",
        mesh.vertices.len(),
        mesh.triangle_count(),
        lo,
        hi
    );
}
