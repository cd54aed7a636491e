use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{Constraint, Instance, Solution};
use crate::geometry::primitives::Edge;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

pub fn solution_to_svg(
    instance: &Instance,
    solution: &Solution,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let board = &instance.board;
    let bbox = board.bbox;

    let margin = 0.05 * f64::max(bbox.width(), bbox.height());
    let vbox = bbox.resize_by(margin, margin).unwrap_or(bbox);

    let theme = &options.theme;

    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f64::min(bbox.width(), bbox.height()) * 0.025;

    let label = {
        //print some information above the left top of the board
        let label_content = format!(
            "width: {:.3} | height: {:.3} | center of mass: {} | {}",
            bbox.width(),
            bbox.height(),
            solution.center_of_mass,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set("y", bbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let board_group = Group::new()
        .set("id", "board")
        .add(svg_util::data_to_path(
            svg_util::aa_rect_data(bbox),
            &[
                ("fill", &*format!("{}", theme.board_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!("board, {}x{}", board.width, board.height)));

    let keepout_group = solution.keepouts.iter().fold(
        Group::new().set("id", "keepouts"),
        |group, keepout| {
            let owner = &instance.component(keepout.owner).name;
            group.add(
                Group::new()
                    .add(svg_util::data_to_path(
                        svg_util::aa_rect_data(keepout.rect),
                        &[
                            ("fill", &*format!("{}", theme.keepout_fill)),
                            ("fill-opacity", &*format!("{}", theme.keepout_opacity)),
                            ("stroke", &*format!("{}", theme.keepout_fill)),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
                            ),
                        ],
                    ))
                    .add(Title::new(format!(
                        "keepout of {owner}, {} side, {}",
                        keepout.side, keepout.rect
                    ))),
            )
        },
    );

    let component_group = {
        let mut component_group = Group::new().set("id", "components");
        for pc in &solution.placed {
            let spec = instance.component(pc.comp_id);
            let fill = theme.component_fill(pc.comp_id);
            let title = Title::new(format!(
                "{}, id: {}, top-left: {}, rotation: {}",
                spec.name, pc.comp_id, pc.position, pc.rotation
            ));
            let mut group = Group::new()
                .set("id", format!("component_{}", pc.comp_id))
                .add(svg_util::data_to_path(
                    svg_util::aa_rect_data(pc.bbox),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("fill-opacity", &*format!("{}", theme.component_opacity)),
                        ("stroke", &*format!("{}", svg_util::change_brightness(fill, 0.5))),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                ))
                .add(title);
            if options.labels {
                let center = pc.center();
                let size = f64::min(pc.bbox.width(), pc.bbox.height()) * 0.3;
                group = group.add(
                    Text::new(spec.name.clone())
                        .set("x", center.x())
                        .set("y", center.y())
                        .set("font-size", size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central")
                        .set("fill", format!("{}", theme.label_color)),
                );
            }
            component_group = component_group.add(group);
        }
        component_group
    };

    let sight_group = match options.sight_lines {
        false => None,
        true => {
            let group = instance
                .constraints
                .iter()
                .filter_map(|c| match c {
                    Constraint::LineOfSight { from, to, .. } => Some(Edge::new(
                        solution.placed_component(*from).center(),
                        solution.placed_component(*to).center(),
                    )),
                    _ => None,
                })
                .fold(Group::new().set("id", "sight_lines"), |group, sight| {
                    group.add(svg_util::data_to_path(
                        svg_util::edge_data(sight),
                        &[
                            ("stroke", &*format!("{}", theme.marker_color)),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width),
                            ),
                            ("stroke-linecap", "round"),
                        ],
                    ))
                });
            Some(group)
        }
    };

    let com_group = match options.center_of_mass {
        false => None,
        true => {
            let color = format!("{}", theme.marker_color);
            let radius = 4.0 * stroke_width;
            Some(
                Group::new()
                    .set("id", "center_of_mass")
                    .add(
                        svg_util::point(board.center(), Some("none"), Some(2.0 * radius))
                            .set("stroke", color.as_str())
                            .set("stroke-width", stroke_width),
                    )
                    .add(svg_util::point(
                        solution.center_of_mass,
                        Some(&color),
                        Some(radius),
                    ))
                    .add(Title::new(format!(
                        "center of mass: {}, board center: {}",
                        solution.center_of_mass,
                        board.center()
                    ))),
            )
        }
    };

    let optionals = [sight_group, com_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(board_group)
        .add(keepout_group)
        .add(component_group)
        .add(optionals)
        .add(label)
}
