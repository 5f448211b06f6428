use egui::{Color32, Mesh, Rect, Shape};

fn to_color([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Fill `rect` with a three-stop gradient running top-left to bottom-right.
pub fn paint(ui: &egui::Ui, rect: Rect, stops: [[u8; 3]; 3]) {
    let [start, middle, end] = stops.map(to_color);

    // The two off-diagonal corners sit halfway along the gradient axis.
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.colored_vertex(rect.center(), middle);
    mesh.add_triangle(0, 1, 4);
    mesh.add_triangle(1, 2, 4);
    mesh.add_triangle(2, 3, 4);
    mesh.add_triangle(3, 0, 4);

    ui.painter().add(Shape::mesh(mesh));
}
