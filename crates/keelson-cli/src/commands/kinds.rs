use super::{json_pretty, EXIT_SUCCESS};
use keelson_schema::SortOrder;

pub fn run(order: SortOrder, json: bool) -> Result<u8, String> {
    let kinds = order.kinds();
    if json {
        println!("{}", json_pretty(&kinds)?);
    } else {
        for (index, kind) in kinds.iter().enumerate() {
            println!("{index:>3}  {kind}");
        }
    }
    Ok(EXIT_SUCCESS)
}
